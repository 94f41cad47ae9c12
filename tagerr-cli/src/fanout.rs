//! Fan-out demo: run tasks concurrently, fan their failures back in
//! as a single tagged error.

use tagerr::{tag_errorf, Error, Group, Tag};

/// Outer tag for the combined failure
pub const FANOUT: Tag = Tag::new("fanout");

/// Tag applied to each failing task
pub const WORKER: Tag = Tag::new("worker");

/// Fan-out parameters
#[derive(Debug, Clone, Copy)]
pub struct FanoutConfig {
    /// Number of tasks to spawn
    pub tasks: usize,
    /// Every n-th task fails (0 = none fail)
    pub fail_every: usize,
}

/// Outcome of a fan-out run
pub struct FanoutResult {
    pub succeeded: Vec<u64>,
    pub error: Option<Error>,
}

fn work(id: usize, fail_every: usize) -> tagerr::Result<u64> {
    if fail_every > 0 && id % fail_every == 0 {
        return Err(tag_errorf!(WORKER, "task {} failed", id));
    }
    Ok((id as u64) * (id as u64))
}

/// Spawn every task, wait for all of them and combine the failures
pub async fn run(config: FanoutConfig) -> FanoutResult {
    let handles: Vec<_> = (0..config.tasks)
        .map(|id| tokio::spawn(async move { work(id, config.fail_every) }))
        .collect();

    let mut group = Group::new();
    let mut succeeded = Vec::new();
    for handle in handles {
        match handle.await {
            Ok(Ok(value)) => succeeded.push(value),
            Ok(Err(err)) => group.append(err),
            Err(join_err) => group.append(Error::from(join_err)),
        }
    }

    tracing::debug!(
        succeeded = succeeded.len(),
        failed = group.len(),
        "fan-out finished"
    );

    FanoutResult {
        succeeded,
        error: FANOUT.wrap_opt(group.err()),
    }
}
