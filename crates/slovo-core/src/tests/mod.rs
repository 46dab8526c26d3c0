mod lookup_tests;
