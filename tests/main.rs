use sort_test_tools::instantiate_sort_tests;

mod cocktail_shaker {
    use super::*;

    type TestSort = classic_sorts::stable::cocktail_shaker::SortImpl;

    instantiate_sort_tests!(TestSort);
}

mod insertion {
    use super::*;

    type TestSort = classic_sorts::stable::insertion::SortImpl;

    instantiate_sort_tests!(TestSort);
}

mod merge {
    use super::*;

    type TestSort = classic_sorts::stable::merge::SortImpl;

    instantiate_sort_tests!(TestSort);
}

mod selection {
    use super::*;

    type TestSort = classic_sorts::unstable::selection::SortImpl;

    instantiate_sort_tests!(TestSort);
}

mod quick {
    use super::*;

    type TestSort = classic_sorts::unstable::quick::SortImpl;

    instantiate_sort_tests!(TestSort);
}
