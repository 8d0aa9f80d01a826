/// Configuration for a [`WorkerPool`](crate::pool::controller::WorkerPool).
///
/// # Examples
///
/// ```rust
/// use forgepool::PoolConfig;
///
/// // Default configuration: one worker per logical CPU
/// let default_config = PoolConfig::default();
///
/// // Custom configuration
/// let custom_config = PoolConfig::default()
///     .threads(4)
///     .thread_name_prefix("image-worker");
/// ```
#[derive(Clone, Debug)]
pub struct PoolConfig {
    /// The number of worker threads. A value of zero is clamped to one at
    /// pool construction; it is not an error.
    pub threads: usize,

    /// Prefix for worker thread names; the worker index is appended.
    pub thread_name_prefix: String,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
            thread_name_prefix: "forgepool-worker".to_string(),
        }
    }
}

impl PoolConfig {
    /// Sets the worker thread count.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Sets the worker thread name prefix.
    pub fn thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_cpu_count() {
        let config = PoolConfig::default();
        assert_eq!(config.threads, num_cpus::get());
        assert_eq!(config.thread_name_prefix, "forgepool-worker");
    }

    #[test]
    fn builder_style_setters() {
        let config = PoolConfig::default().threads(3).thread_name_prefix("w");
        assert_eq!(config.threads, 3);
        assert_eq!(config.thread_name_prefix, "w");
    }
}
