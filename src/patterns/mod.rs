//! Built-in pattern demos, one module per category.

pub mod behavioral;
pub mod creational;
pub mod structural;

use crate::domain::ports::Demo;

/// 目錄順序：建立型、結構型、行為型
pub fn builtin_demos() -> Vec<Box<dyn Demo>> {
    let mut demos = creational::demos();
    demos.extend(structural::demos());
    demos.extend(behavioral::demos());
    demos
}
