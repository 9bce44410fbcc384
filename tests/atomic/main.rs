/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/


mod concurrent_tests;
mod float_tests;
mod integer_tests;
mod ptr_tests;
