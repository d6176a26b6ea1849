pub mod home_page;
pub mod search_page;
pub mod project_detail_page;
pub mod signup_page;
pub mod login_page;
pub mod profile_page;

pub(crate) const FORM_CARD_STYLE: &str = "
    display: flex;
    flex-direction: column;
    gap: 16px;
    width: 100%;
    max-width: 480px;
    margin: 40px auto;
    padding: 28px;
    background-color: white;
    border: 1px solid #E5E7EB;
    border-radius: 12px;
    box-sizing: border-box;
";

pub(crate) const PRIMARY_BUTTON_STYLE: &str = "
    height: 44px;
    border: none;
    border-radius: 8px;
    background-color: #2563EB;
    color: white;
    font-size: 16px;
    font-weight: 700;
    cursor: pointer;
";
