mod argon2_hasher;
mod bcrypt_hasher;

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;

use crate::account::application::ports::outgoing::HashError;

/// Runs CPU-heavy hashing work on tokio's blocking pool.
async fn run_blocking<T, F>(work: F) -> Result<T, HashError>
where
    F: FnOnce() -> Result<T, HashError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|_| HashError::TaskFailed)?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blocking_result_is_passed_through() {
        assert_eq!(run_blocking(|| Ok(7)).await.unwrap(), 7);
        assert!(matches!(
            run_blocking::<(), _>(|| Err(HashError::HashFailed)).await,
            Err(HashError::HashFailed)
        ));
    }

    #[tokio::test]
    async fn panicking_work_is_task_failed() {
        let result = run_blocking::<(), _>(|| panic!("hasher blew up")).await;

        assert!(matches!(result, Err(HashError::TaskFailed)));
    }
}
