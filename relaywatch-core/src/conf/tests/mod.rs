mod validation_tests;
