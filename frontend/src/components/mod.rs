mod advisor_view;
mod app;
mod calculator_view;
mod icons;
mod input_form;
mod report_display;

pub use app::App;
