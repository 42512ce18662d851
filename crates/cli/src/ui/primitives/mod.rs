pub mod button;
pub mod card;
pub mod icon;

pub use button::{Button, Variant};
pub use card::Card;
pub use icon::{Icon, IconName};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}
