/// Keys used to filter and purge rows. Source ids are `INT` columns of
/// either signedness, so everything is widened to a signed 64-bit value.
pub type DbId = i64;
