//! Translation of redis crate errors into the cache error taxonomy.

use redcache_core::cache::CacheError;

/// Maps a Redis error onto `CacheError`.
///
/// Refused, dropped, timed out and other I/O failures are connection
/// failures. Error replies from the server (`WRONGTYPE`, `ERR ...`) are
/// operation failures and keep the server's code in the message.
pub fn map_redis_error(err: redis::RedisError) -> CacheError {
    let transport = err.is_connection_refusal()
        || err.is_timeout()
        || err.is_connection_dropped()
        || err.is_io_error();

    if transport {
        return CacheError::ConnectionFailed(err.to_string());
    }

    let message = match (err.code(), err.detail()) {
        (Some(code), Some(detail)) => format!("{code}: {detail}"),
        _ => err.to_string(),
    };
    CacheError::OperationFailed(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_is_operation_failure() {
        let err = redis::RedisError::from((
            redis::ErrorKind::ResponseError,
            "invalid expire time in 'psetex' command",
        ));

        assert!(matches!(
            map_redis_error(err),
            CacheError::OperationFailed(_)
        ));
    }

    #[test]
    fn test_server_error_keeps_code() {
        let err = redis::RedisError::from((
            redis::ErrorKind::TypeError,
            "WRONGTYPE",
            "Operation against a key holding the wrong kind of value".to_string(),
        ));

        let mapped = map_redis_error(err);

        assert!(
            matches!(mapped, CacheError::OperationFailed(ref msg) if msg.contains("WRONGTYPE"))
        );
    }

    #[test]
    fn test_refused_connection_is_connection_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = redis::RedisError::from(io);

        assert!(matches!(
            map_redis_error(err),
            CacheError::ConnectionFailed(_)
        ));
    }
}
