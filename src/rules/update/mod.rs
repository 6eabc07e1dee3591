//! Rules that help with moving a pack to a newer version of the game

mod v1_17;

pub use self::v1_17::Update1_17;
