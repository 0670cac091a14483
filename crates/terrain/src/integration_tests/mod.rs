//! Cross-module pipeline tests: height field -> world mesh -> tiles ->
//! streaming window, run on worlds small enough to build quickly.

mod seam_tests;
