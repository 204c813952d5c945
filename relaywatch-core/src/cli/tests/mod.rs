mod summarize_tests;
