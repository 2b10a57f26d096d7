pub mod booking_service;
pub mod extraction;
pub mod fallback;
pub mod llm_client;
pub mod planner_service;
pub mod prompts;
pub mod weather_service;
