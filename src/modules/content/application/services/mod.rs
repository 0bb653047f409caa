pub mod blog_index_page;
pub mod blog_post_page;
pub mod contact_form;
pub mod home_page;
