mod image_tests;
mod provision_tests;
mod task_tests;
