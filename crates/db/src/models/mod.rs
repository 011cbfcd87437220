pub mod canva_token;
pub mod company;
pub mod sponsorship;
