pub(crate) mod common;
pub(crate) mod fork_join;
pub(crate) mod sequential;
pub(crate) mod work_stealing;
