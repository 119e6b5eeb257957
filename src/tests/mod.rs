mod accessor_tests;
