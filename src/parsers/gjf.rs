//! # Gaussian 输入文件 (.gjf) 生成
//!
//! 由原子序列生成几何优化输入文件。
//!
//! ## 输入文件结构
//! ```text
//! %chk=water.chk
//! %mem=2GB
//! %nprocshared=4
//!
//! # opt b3lyp/6-31g(d)
//!
//! Molecular Optimization
//!
//! 0 1
//!  O     0.000000     0.000000     0.117000
//!  ...
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `models/structure.rs`

use crate::models::Atom;

/// 计算任务设置
#[derive(Debug, Clone, PartialEq)]
pub struct JobSettings {
    pub jobname: String,
    pub method: String,
    pub basis: String,
    pub mem: String,
    pub nproc: u32,
    pub charge: i32,
    pub multiplicity: u32,
    pub title: String,
}

impl Default for JobSettings {
    fn default() -> Self {
        JobSettings {
            jobname: "job".to_string(),
            method: "b3lyp".to_string(),
            basis: "6-31g(d)".to_string(),
            mem: "2GB".to_string(),
            nproc: 4,
            charge: 0,
            multiplicity: 1,
            title: "Molecular Optimization".to_string(),
        }
    }
}

/// 标题行只保留字母数字、空格、`-`、`_`，其余替换为 `_`
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// 将原子序列转换为 Gaussian 优化输入文件字符串
pub fn to_gjf_string(atoms: &[Atom], settings: &JobSettings) -> String {
    let mut result = String::new();

    // Link 0
    result.push_str(&format!("%chk={}.chk\n", settings.jobname.trim()));
    result.push_str(&format!("%mem={}\n", settings.mem));
    result.push_str(&format!("%nprocshared={}\n\n", settings.nproc));

    // Route
    result.push_str(&format!("# opt {}/{}\n\n", settings.method, settings.basis));

    result.push_str(&format!("{}\n\n", sanitize_title(&settings.title)));

    result.push_str(&format!("{} {}\n", settings.charge, settings.multiplicity));

    // 坐标 (Å)
    for atom in atoms {
        result.push_str(&format!(
            "{:>2} {:>12.6} {:>12.6} {:>12.6}\n",
            atom.symbol.to_string(),
            atom.position[0],
            atom.position[1],
            atom.position[2]
        ));
    }

    // Gaussian 要求以空行结束
    result.push_str("\n\n\n");

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_title() {
        assert_eq!(sanitize_title("Water opt (B3LYP)"), "Water opt _B3LYP_");
        assert_eq!(sanitize_title("run-01_final"), "run-01_final");
    }

    #[test]
    fn test_to_gjf_string() {
        let atoms = vec![
            Atom::new("O", [0.0, 0.0, 0.117]),
            Atom::new("H", [0.0, 0.757, -0.467]),
        ];
        let settings = JobSettings {
            jobname: " water ".to_string(),
            ..JobSettings::default()
        };
        let gjf = to_gjf_string(&atoms, &settings);
        let lines: Vec<&str> = gjf.lines().collect();

        assert_eq!(lines[0], "%chk=water.chk");
        assert_eq!(lines[1], "%mem=2GB");
        assert_eq!(lines[2], "%nprocshared=4");
        assert_eq!(lines[4], "# opt b3lyp/6-31g(d)");
        assert_eq!(lines[6], "Molecular Optimization");
        assert_eq!(lines[8], "0 1");
        assert_eq!(lines[9], " O     0.000000     0.000000     0.117000");
        assert_eq!(lines[10], " H     0.000000     0.757000    -0.467000");
        assert!(gjf.ends_with("\n\n\n\n"));
    }

    #[test]
    fn test_gjf_charge_and_multiplicity() {
        let atoms = vec![Atom::new("O", [0.0, 0.0, 0.0])];
        let settings = JobSettings {
            charge: -1,
            multiplicity: 2,
            ..JobSettings::default()
        };
        let gjf = to_gjf_string(&atoms, &settings);
        assert!(gjf.contains("\n-1 2\n"));
    }
}
