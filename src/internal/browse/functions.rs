pub mod map_responses;
pub mod strip_base_prefix;
