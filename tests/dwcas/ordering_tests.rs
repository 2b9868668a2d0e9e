/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

test_cas_variant!(relaxed, relaxed_tests);
test_cas_variant!(acquire, acquire_tests);
test_cas_variant!(release, release_tests);
test_cas_variant!(acq_rel, acq_rel_tests);
