mod degree;
mod node;
mod raw_btree;

pub(crate) use degree::Degree;
pub(crate) use raw_btree::RawBTree;
