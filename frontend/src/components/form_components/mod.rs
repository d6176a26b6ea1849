pub mod text_input_field;
pub mod select_field;
pub mod multi_select_field;
pub mod form_message;

pub(crate) const FIELD_LABEL_STYLE: &str = "display: block; font-size: 14px; font-weight: 500; color: #374151; margin-bottom: 4px;";
pub(crate) const FIELD_INPUT_STYLE: &str = "
    width: 100%;
    height: 40px;
    padding: 0 10px;
    border: 1px solid #D1D5DB;
    border-radius: 6px;
    font-size: 15px;
    background-color: white;
    box-sizing: border-box;
";
