pub mod shell_pdf_engine;
