pub mod canva;
pub mod companies;
pub mod sponsorships;
