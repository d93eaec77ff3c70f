pub mod cascader;
pub mod modal;
pub mod pagination_controls;
pub mod popconfirm;
pub mod upload;
