pub mod chart_frame;
