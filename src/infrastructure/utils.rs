pub mod dates;
pub mod icons;
pub mod palette;
