mod partition;
mod slice;
mod split;

pub use partition::{partition, partition_by, partition_with, Partition, PartitionBy};
pub(crate) use slice::clamp_count;
pub use slice::{
    butlast, drop, drop_last, drop_while, rest, take, take_nth, take_while, Butlast, DropLast,
    DropN, DropWhile, Take, TakeNth, TakeWhile,
};
pub use split::{split_at, split_with, SplitRest};
