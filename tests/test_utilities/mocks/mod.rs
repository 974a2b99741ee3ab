mod mock_vulnerability_repository;

pub use mock_vulnerability_repository::MockVulnerabilityRepository;
