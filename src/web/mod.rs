//! Server-rendered HTML pages: landing page, admin page, and the not-found
//! page shown for dead short links.

pub mod pages;
