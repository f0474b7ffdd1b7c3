mod classifier_test;
mod export_test;
mod import_test;
