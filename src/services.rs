pub mod complaint_service;
