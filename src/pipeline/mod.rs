pub mod stage1_load;
pub mod stage2_normalize;
pub mod stage3_quantize;
pub mod stage4_write;
