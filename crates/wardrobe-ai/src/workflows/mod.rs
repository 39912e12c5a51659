pub mod closet;
pub mod outfits;
