pub mod provision_service;
