pub mod charge_map;
