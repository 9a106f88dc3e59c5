pub mod prompt;
pub mod serve;
pub mod targets;
pub mod version;

/// The server and the one-shot command share a single-threaded runtime
pub(crate) fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}
