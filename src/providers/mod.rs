pub mod cms;
pub mod static_data;
pub mod util;

pub use cms::CmsDataProvider;
pub use static_data::StaticDataProvider;
