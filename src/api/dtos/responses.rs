use serde::Serialize;
use crate::domain::models::time_card::TimeCard;

#[derive(Serialize)]
pub struct ClockStatusResponse {
    pub active: bool,
    pub current_session: Option<TimeCard>,
}

#[derive(Serialize)]
pub struct PeriodSummaryResponse {
    pub cards: Vec<TimeCard>,
    pub total_hours: f64,
    pub period: &'static str,
}
