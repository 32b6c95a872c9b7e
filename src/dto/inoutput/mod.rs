mod notification_type;
pub(crate) mod object_id_hex;

pub use notification_type::*;
