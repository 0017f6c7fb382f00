pub mod provision_request;
