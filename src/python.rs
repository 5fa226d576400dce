use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::ScoreConfig;
use crate::error::ScoreError;
use crate::tokenize::Granularity;

fn to_py_err(err: ScoreError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Corpus WER (or CER with `char_level=True`) in percent.
#[pyfunction]
#[pyo3(signature = (hypo, r#ref, char_level = false))]
fn score(py: Python, hypo: Vec<String>, r#ref: Vec<String>, char_level: bool) -> PyResult<f64> {
    // Owned Rust data, so the GIL can be released while scoring
    let config = ScoreConfig::from(Granularity::from_char_level(char_level));
    py.allow_threads(|| crate::score::score_with(&hypo, &r#ref, &config))
        .map_err(to_py_err)
}

/// WER (or CER) of a single hypothesis/reference pair in percent.
#[pyfunction]
#[pyo3(signature = (hypo, r#ref, char_level = false))]
fn score_sent(py: Python, hypo: String, r#ref: String, char_level: bool) -> PyResult<f64> {
    let config = ScoreConfig::from(Granularity::from_char_level(char_level));
    py.allow_threads(|| crate::score::score_sent(&hypo, &r#ref, &config))
        .map_err(to_py_err)
}

#[pymodule]
fn fastwer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(score, m)?)?;
    m.add_function(wrap_pyfunction!(score_sent, m)?)?;
    Ok(())
}
