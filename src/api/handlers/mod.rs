pub mod analysis;
pub mod dashboard;
pub mod gems;
pub mod market;
pub mod settings;
pub mod suggestions;
pub mod system;
pub mod trades;
pub mod wallet;
pub mod ws;

use serde::Serialize;

/// Standard success envelope used by list-style endpoints.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}
