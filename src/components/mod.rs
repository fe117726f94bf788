mod app;
mod mount;

pub use app::PortfolioPage;
pub use mount::mount_node;
