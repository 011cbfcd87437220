pub mod canva_token_repo;
pub mod company_repo;
pub mod sponsorship_repo;

pub use canva_token_repo::CanvaTokenRepo;
pub use company_repo::CompanyRepo;
pub use sponsorship_repo::SponsorshipRepo;
