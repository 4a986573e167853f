pub mod stage1_estimate;
pub mod stage2_batch;
pub mod stage3_report;
