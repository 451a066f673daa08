use std::hash::{DefaultHasher, Hash, Hasher};

use gridkit_xlsx_ref::{
    AddressError, CellArea, CellRef, ColumnId, ColumnRange, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
    N_ROW_MIN, SpecRangeRender, column_name_to_number, column_number_to_name, derive_header_key,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::pyclass::CompareOp;

const N_BRIDGE_ABI_VERSION: u64 = 1;
const C_BRIDGE_CONTRACT_VERSION: &str = "gridkit.xlsx.ref.v1";

#[pyclass(name = "CellRef", frozen)]
struct PyCellRef {
    inner: CellRef,
}

#[pymethods]
impl PyCellRef {
    #[new]
    #[pyo3(signature = (column, row, sheet = None))]
    fn new(column: &Bound<'_, PyAny>, row: u32, sheet: Option<String>) -> PyResult<Self> {
        let column = derive_column_id(column)?;
        Ok(Self {
            inner: CellRef::new(column, row).with_sheet(sheet),
        })
    }

    #[staticmethod]
    fn parse(text: &str) -> PyResult<Self> {
        CellRef::parse(text)
            .map(|inner| Self { inner })
            .map_err(derive_py_value_error)
    }

    #[getter]
    fn column(&self) -> String {
        self.inner.column().to_name().to_string()
    }

    #[getter]
    fn column_no(&self) -> u32 {
        self.inner.column().to_number()
    }

    #[getter]
    fn row(&self) -> u32 {
        self.inner.row()
    }

    #[getter]
    fn sheet(&self) -> Option<String> {
        self.inner.sheet().map(str::to_string)
    }

    fn to_absolute(&self) -> String {
        self.inner.to_absolute()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("CellRef({:?})", self.inner.to_string())
    }

    fn __richcmp__(&self, other: PyRef<'_, Self>, op: CompareOp) -> bool {
        op.matches(self.inner.cmp(&other.inner))
    }

    fn __hash__(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }
}

#[pyfunction]
#[pyo3(name = "column_number_to_name")]
fn py_column_number_to_name(no: u32) -> String {
    column_number_to_name(no)
}

#[pyfunction]
#[pyo3(name = "column_name_to_number")]
fn py_column_name_to_number(name: &str) -> u32 {
    column_name_to_number(name)
}

/// `(column_name, row, sheet)`; raises `ValueError` on malformed input.
#[pyfunction]
fn parse_cell_ref(text: &str) -> PyResult<(String, u32, Option<String>)> {
    let cell = CellRef::parse(text).map_err(derive_py_value_error)?;
    Ok((
        cell.column().to_name().to_string(),
        cell.row(),
        cell.sheet().map(str::to_string),
    ))
}

#[pyfunction]
#[pyo3(signature = (
    start_column, start_row, end_column, end_row, sheet = None, if_absolute = false
))]
fn format_cell_area(
    start_column: &Bound<'_, PyAny>,
    start_row: u32,
    end_column: &Bound<'_, PyAny>,
    end_row: u32,
    sheet: Option<String>,
    if_absolute: bool,
) -> PyResult<String> {
    let area = CellArea::new(
        CellRef::new(derive_column_id(start_column)?, start_row).with_sheet(sheet.clone()),
        CellRef::new(derive_column_id(end_column)?, end_row).with_sheet(sheet),
    );
    Ok(area.render(&derive_range_render(if_absolute)))
}

#[pyfunction]
#[pyo3(signature = (
    column, start_row = N_ROW_MIN, end_row = N_NROWS_EXCEL_MAX, sheet = None, if_absolute = true
))]
fn format_column_range(
    column: &Bound<'_, PyAny>,
    start_row: u32,
    end_row: u32,
    sheet: Option<String>,
    if_absolute: bool,
) -> PyResult<String> {
    let range = ColumnRange::new(derive_column_id(column)?)
        .with_rows(start_row, end_row)
        .with_sheet(sheet);
    Ok(range.render(&derive_range_render(if_absolute)))
}

#[pyfunction]
#[pyo3(name = "derive_header_key")]
fn py_derive_header_key(text: &str) -> String {
    derive_header_key(text)
}

fn derive_range_render(if_absolute: bool) -> SpecRangeRender {
    if if_absolute {
        SpecRangeRender::absolute()
    } else {
        SpecRangeRender::relative()
    }
}

/// Accept a column as its number (`3`) or its letters (`"C"`).
fn derive_column_id(obj: &Bound<'_, PyAny>) -> PyResult<ColumnId> {
    if let Ok(no) = obj.extract::<u32>() {
        return Ok(ColumnId::from_number(no));
    }
    let name: String = obj.extract()?;
    name.parse::<ColumnId>().map_err(derive_py_value_error)
}

fn derive_py_value_error(err: AddressError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

#[pymodule]
fn _gridkit_xlsx_ref_rs(_py: Python<'_>, module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<PyCellRef>()?;
    module.add_function(wrap_pyfunction!(py_column_number_to_name, module)?)?;
    module.add_function(wrap_pyfunction!(py_column_name_to_number, module)?)?;
    module.add_function(wrap_pyfunction!(parse_cell_ref, module)?)?;
    module.add_function(wrap_pyfunction!(format_cell_area, module)?)?;
    module.add_function(wrap_pyfunction!(format_column_range, module)?)?;
    module.add_function(wrap_pyfunction!(py_derive_header_key, module)?)?;
    module.add("N_NROWS_EXCEL_MAX", N_NROWS_EXCEL_MAX)?;
    module.add("N_NCOLS_EXCEL_MAX", N_NCOLS_EXCEL_MAX)?;
    module.add("__bridge_abi__", N_BRIDGE_ABI_VERSION)?;
    module.add("__bridge_contract__", C_BRIDGE_CONTRACT_VERSION)?;
    Ok(())
}
