// SPDX-License-Identifier: Apache-2.0

//! Procedural macros for nanotest.
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Error, FnArg, ItemFn, ReturnType, parse_macro_input};

/// Marks a function as a nanotest test.
///
/// The function must take the test context as its only argument and may
/// optionally return `TestResult`. The attribute rewrites the body so the
/// function always returns `TestResult` and emits a `TestDescriptor` static
/// named after the function in uppercase, ready to be registered with a
/// `TestRunner`.
///
/// ```ignore
/// use nanotest::{TestContext, check_eq, def_test};
///
/// #[def_test]
/// fn addition(cx: &mut TestContext) {
///     check_eq!(cx, "2 + 2 must be equal to 4", 4, 2 + 2);
/// }
///
/// // registered as `ADDITION`
/// ```
///
/// # Attributes
/// - `#[def_test]` - Normal test
/// - `#[def_test(ignore)]` - Test is recorded as ignored and never run
#[proc_macro_attribute]
pub fn def_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    generate_function_test(attr, input)
}

/// Generate the wrapped test function and its descriptor
fn generate_function_test(attr: TokenStream, input: ItemFn) -> TokenStream {
    let attr_str = attr.to_string();
    let ignore = attr_str.contains("ignore");
    if !attr_str.is_empty() && !ignore {
        return Error::new_spanned(
            &input.sig.ident,
            "expect `#[def_test]` or `#[def_test(ignore)]`",
        )
        .to_compile_error()
        .into();
    }

    let fn_name = &input.sig.ident;
    let fn_attrs = &input.attrs;
    let fn_vis = &input.vis;
    let fn_stmts = &input.block.stmts;
    let fn_inputs = &input.sig.inputs;

    // The test body needs exactly one argument: the context.
    let context_arg_ok = fn_inputs.len() == 1
        && matches!(fn_inputs.first(), Some(FnArg::Typed(_)));
    if !context_arg_ok {
        return Error::new_spanned(
            &input.sig,
            "expect exactly one argument: the test context (`cx: &mut TestContext`)",
        )
        .to_compile_error()
        .into();
    }

    // Check if the function already returns TestResult
    let has_return_type = !matches!(input.sig.output, ReturnType::Default);

    // The test function itself becomes the wrapper - body is embedded directly
    // so check macros can use `return TestResult::Fatal` on required failures
    let test_fn = if has_return_type {
        quote! {
            #(#fn_attrs)*
            #fn_vis fn #fn_name(#fn_inputs) -> nanotest::TestResult {
                #(#fn_stmts)*
            }
        }
    } else {
        // Body in its own block so a trailing expression stays well-formed.
        quote! {
            #(#fn_attrs)*
            #fn_vis fn #fn_name(#fn_inputs) -> nanotest::TestResult {
                {
                    #(#fn_stmts)*
                }
                nanotest::TestResult::Ok
            }
        }
    };

    let descriptor_name = format_ident!("{}", fn_name.to_string().to_uppercase());
    let fn_name_str = fn_name.to_string();
    let ignore_val = ignore;

    let output = quote! {
        #test_fn

        #fn_vis static #descriptor_name: nanotest::TestDescriptor = nanotest::TestDescriptor::new(
            #fn_name_str,
            module_path!(),
            #fn_name,
            #ignore_val,
        );
    };

    output.into()
}
