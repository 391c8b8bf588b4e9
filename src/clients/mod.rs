pub mod wp_client;

pub use wp_client::WpClient;
