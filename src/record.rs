//! 按钮记录与加载模块：
//! - 定义 `ButtonRecord`（文本/图标/链接 + 可选样式）
//! - 按扩展名从 CSV 或 JSON 文件读取记录，保持原有顺序

use std::{fmt, fs, path::{Path, PathBuf}};

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// 单个按钮的描述。所有字段均可缺省，渲染时回退到默认值。
/// 文本/图标/链接可写任意 JSON 标量（数字、布尔值按其字面形式转为字符串）。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct ButtonRecord {
    #[serde(default, deserialize_with = "de_scalar")]
    pub(crate) text: Option<String>,
    /// Font Awesome 图标名（不含 `fa-` 前缀）
    #[serde(default, rename = "fa icon", deserialize_with = "de_scalar")]
    pub(crate) icon: Option<String>,
    #[serde(default, deserialize_with = "de_scalar")]
    pub(crate) url: Option<String>,
    /// 按钮宽度（像素），JSON 中可写数字或数字字符串
    #[serde(default, rename = "button width", deserialize_with = "de_pixels")]
    pub(crate) width: Option<Pixels>,
    #[serde(default, rename = "fontsize", deserialize_with = "de_pixels")]
    pub(crate) font_size: Option<Pixels>,
    /// 背景色，任意 CSS 颜色值
    #[serde(default, deserialize_with = "de_non_empty")]
    pub(crate) color: Option<String>,
    #[serde(default, rename = "hovered color", deserialize_with = "de_non_empty")]
    pub(crate) hovered_color: Option<String>,
}

impl ButtonRecord {
    /// CSV 行对应的最小记录：只有文本、图标、链接
    pub(crate) fn link(text: &str, icon: &str, url: &str) -> Self {
        ButtonRecord {
            text: Some(text.to_string()),
            icon: Some(icon.to_string()),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    /// 是否带有任何内联样式字段
    pub(crate) fn has_style(&self) -> bool {
        self.width.is_some() || self.font_size.is_some() || self.color.is_some()
    }
}

/// 像素值（非负有限数，允许小数）
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Pixels(pub(crate) f64);

impl Pixels {
    fn new(v: f64) -> Option<Self> {
        (v.is_finite() && v >= 0.0).then_some(Pixels(v))
    }
}

impl fmt::Display for Pixels {
    // 整数值不带小数点：400.0 -> 400px，12.5 -> 12.5px
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPixels {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

fn de_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawScalar>::deserialize(deserializer)?.map(|raw| match raw {
        RawScalar::Text(s) => s,
        RawScalar::Number(n) => n.to_string(),
        RawScalar::Bool(b) => b.to_string(),
    }))
}

fn de_pixels<'de, D>(deserializer: D) -> Result<Option<Pixels>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let invalid = |shown: String| D::Error::custom(format!("不是有效的像素值: {}", shown));
    match Option::<RawPixels>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawPixels::Number(n)) => Pixels::new(n).map(Some).ok_or_else(|| invalid(n.to_string())),
        Some(RawPixels::Text(s)) => {
            let t = s.trim();
            if t.is_empty() {
                return Ok(None);
            }
            t.parse::<f64>()
                .ok()
                .and_then(Pixels::new)
                .map(Some)
                .ok_or_else(|| invalid(format!("{:?}", s)))
        }
    }
}

fn de_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<String>::deserialize(deserializer)?;
    Ok(v.filter(|s| !s.trim().is_empty()))
}

/// 加载错误
#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("无法处理文件 {0}（既不是 json 也不是 csv）")]
    UnsupportedFormat(PathBuf),
    #[error("读取文件失败: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("解析 CSV 失败: {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{path} 第 {row} 行应为 3 列（文本,图标,链接），实际 {found} 列")]
    CsvFieldCount { path: PathBuf, row: usize, found: usize },
    #[error("解析 JSON 失败: {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} 顶层应为对象数组: {detail}")]
    JsonShape { path: PathBuf, detail: String },
    #[error("{path} 第 {index} 个按钮字段无效")]
    InvalidRecord {
        path: PathBuf,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// 支持的输入格式（由扩展名决定，区分大小写）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    pub(crate) fn detect(path: &Path) -> Result<Self, LoadError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(InputFormat::Csv),
            Some("json") => Ok(InputFormat::Json),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// 读取单个输入文件
pub(crate) fn load_file(path: &Path) -> Result<Vec<ButtonRecord>, LoadError> {
    let format = InputFormat::detect(path)?;
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match format {
        InputFormat::Csv => parse_csv(path, &raw),
        InputFormat::Json => parse_json(path, &raw),
    }
}

pub(crate) fn parse_csv(path: &Path, raw: &str) -> Result<Vec<ButtonRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut out = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if row.len() != 3 {
            let line = row.position().map(|p| p.line() as usize).unwrap_or(i + 1);
            return Err(LoadError::CsvFieldCount {
                path: path.to_path_buf(),
                row: line,
                found: row.len(),
            });
        }
        out.push(ButtonRecord::link(&row[0], &row[1], &row[2]));
    }
    Ok(out)
}

pub(crate) fn parse_json(path: &Path, raw: &str) -> Result<Vec<ButtonRecord>, LoadError> {
    let value: Value = serde_json::from_str(raw).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(LoadError::JsonShape {
                path: path.to_path_buf(),
                detail: format!("顶层是 {}", json_kind(&other)),
            })
        }
    };

    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let obj: Map<String, Value> = match item {
            Value::Object(m) => m,
            other => {
                return Err(LoadError::JsonShape {
                    path: path.to_path_buf(),
                    detail: format!("第 {} 个元素是 {}", index + 1, json_kind(&other)),
                })
            }
        };
        let record = serde_json::from_value(Value::Object(obj)).map_err(|source| {
            LoadError::InvalidRecord {
                path: path.to_path_buf(),
                index: index + 1,
                source,
            }
        })?;
        out.push(record);
    }
    Ok(out)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "布尔值",
        Value::Number(_) => "数字",
        Value::String(_) => "字符串",
        Value::Array(_) => "数组",
        Value::Object(_) => "对象",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_tmp(dir: &Path, name: &str, body: &str) -> PathBuf {
        let p = dir.join(name);
        fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn csv_row_equals_minimal_json_record() {
        let csv = parse_csv(Path::new("a.csv"), "CV,home,https://x\n").unwrap();
        let json = parse_json(
            Path::new("a.json"),
            r#"[{"text":"CV","fa icon":"home","url":"https://x"}]"#,
        )
        .unwrap();
        assert_eq!(csv, json);
    }

    #[test]
    fn csv_honours_quoting_and_skips_blank_lines() {
        let recs = parse_csv(
            Path::new("a.csv"),
            "\"Docs, wiki\",book,https://w\n\nBingo,home,https://b\n",
        )
        .unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].text.as_deref(), Some("Docs, wiki"));
        assert_eq!(recs[1].url.as_deref(), Some("https://b"));
    }

    #[test]
    fn csv_wrong_field_count_is_an_error() {
        let err = parse_csv(Path::new("a.csv"), "CV,home,https://x\nBroken,home\n").unwrap_err();
        match err {
            LoadError::CsvFieldCount { row, found, .. } => {
                assert_eq!(row, 2);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            parse_csv(Path::new("a.csv"), "a,b,c,d\n"),
            Err(LoadError::CsvFieldCount { found: 4, .. })
        ));
    }

    #[test]
    fn json_full_record() {
        let recs = parse_json(
            Path::new("b.json"),
            r#"[{
                "text": "bakasp",
                "fa icon": "home",
                "url": "https://asp.example",
                "button width": "400",
                "color": "ForestGreen",
                "hovered color": "Pink",
                "fontsize": 25,
                "comment": "ignored"
            }]"#,
        )
        .unwrap();
        assert_eq!(
            recs[0],
            ButtonRecord {
                text: Some("bakasp".into()),
                icon: Some("home".into()),
                url: Some("https://asp.example".into()),
                width: Some(Pixels(400.0)),
                font_size: Some(Pixels(25.0)),
                color: Some("ForestGreen".into()),
                hovered_color: Some("Pink".into()),
            }
        );
        assert!(recs[0].has_style());
    }

    #[test]
    fn json_empty_style_values_count_as_absent() {
        let recs = parse_json(
            Path::new("b.json"),
            r#"[{"button width": "", "color": "", "hovered color": null, "fontsize": " "}]"#,
        )
        .unwrap();
        assert_eq!(recs[0], ButtonRecord::default());
        assert!(!recs[0].has_style());
    }

    #[test]
    fn json_must_be_array_of_objects() {
        let p = Path::new("c.json");
        assert!(matches!(parse_json(p, r#"{"text":"x"}"#), Err(LoadError::JsonShape { .. })));
        assert!(matches!(parse_json(p, r#"[{"text":"x"}, "y"]"#), Err(LoadError::JsonShape { .. })));
        assert!(matches!(parse_json(p, "[{"), Err(LoadError::Json { .. })));
    }

    #[test]
    fn json_bad_pixels_is_an_error() {
        let err = parse_json(Path::new("d.json"), r#"[{}, {"button width": "wide"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRecord { index: 2, .. }));
    }

    #[test]
    fn unsupported_extension_is_rejected_before_reading() {
        let err = load_file(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
        assert!(matches!(
            InputFormat::detect(Path::new("links.CSV")),
            Err(LoadError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            InputFormat::detect(Path::new("links")),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn reads_csv_and_json_files_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_tmp(dir.path(), "a.json", r#"[{"text":"a1"},{"text":"a2"}]"#);
        let b = write_tmp(dir.path(), "b.csv", "b1,home,/b1\nb2,home,/b2\n");
        assert_eq!(load_file(&a).unwrap().len(), 2);
        let csv = load_file(&b).unwrap();
        assert_eq!(csv[1], ButtonRecord::link("b2", "home", "/b2"));
    }

    #[test]
    fn json_fractional_pixels_are_accepted() {
        let recs = parse_json(
            Path::new("e.json"),
            r#"[{"text":"a","fontsize":12.5},{"button width":"250.5"},{"button width":25.0}]"#,
        )
        .unwrap();
        assert_eq!(recs[0].font_size, Some(Pixels(12.5)));
        assert_eq!(recs[1].width, Some(Pixels(250.5)));
        assert_eq!(recs[2].width.unwrap().to_string(), "25px");
        assert_eq!(recs[0].font_size.unwrap().to_string(), "12.5px");
    }

    #[test]
    fn json_negative_pixels_are_rejected() {
        let err = parse_json(Path::new("e.json"), r#"[{"fontsize": -3}]"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn json_scalar_text_fields_become_strings() {
        let recs = parse_json(
            Path::new("f.json"),
            r#"[{"text": 2024, "fa icon": true, "url": "/"}, {"text": 1.5}]"#,
        )
        .unwrap();
        assert_eq!(recs[0], ButtonRecord::link("2024", "true", "/"));
        assert_eq!(recs[1].text.as_deref(), Some("1.5"));
        assert!(matches!(
            parse_json(Path::new("f.json"), r#"[{"text": ["x"]}]"#),
            Err(LoadError::InvalidRecord { .. })
        ));
    }
}
