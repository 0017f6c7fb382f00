pub mod provision_outcome;
