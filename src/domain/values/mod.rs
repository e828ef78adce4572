pub mod draw_calendar;
pub mod prize_text;
pub mod ticket_number;
