//! Procedural macros for **llm-tool-parser**
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro_error::{abort, proc_macro_error};
use quote::{ToTokens, quote};
use syn::{
    Attribute, Expr, ExprArray, ExprLit, FnArg, GenericArgument, ItemFn, Lit, LitStr, Meta,
    MetaNameValue, Pat, PatIdent, PatType, PathArguments, Token, Type, TypePath,
    ext::IdentExt, parse::Parser, parse_macro_input, punctuated::Punctuated, spanned::Spanned,
};
use tool_parser_core::{FunctionSignature, Parameter, ToolAnnotations, validate};

// ============================================================================
// CRATE PATH
// ============================================================================

fn get_crate_path() -> proc_macro2::TokenStream {
    for candidate in ["tool_parser_core", "llm-tool-parser"] {
        match crate_name(candidate) {
            Ok(FoundCrate::Itself) => return quote!(crate),
            Ok(FoundCrate::Name(name)) => {
                let ident = Ident::new(&name, Span::call_site());
                return quote!(::#ident);
            }
            Err(_) => continue,
        }
    }
    quote!(::llm_tool_parser)
}

// ============================================================================
// TYPE NAMES
// ============================================================================

/// `T` when `ty` is `Option<T>` (also `std::option::Option` / `core::option::Option`).
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };

    let idents: Vec<_> = path.segments.iter().map(|s| &s.ident).collect();
    let is_option = match idents.as_slice() {
        [ident] => *ident == "Option",
        [first, second, ident] => {
            (*first == "std" || *first == "core") && *second == "option" && *ident == "Option"
        }
        _ => false,
    };
    if !is_option {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &path.segments.last()?.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

/// Render a type the way it is written in source.
///
/// Token spacing is dropped except between two word characters, which keeps
/// `&'a str` and `dyn Trait` readable. Commas get a trailing space.
fn type_name(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let chars: Vec<char> = raw.chars().collect();
    let is_word = |c: char| c.is_alphanumeric() || c == '_';

    let mut out = String::with_capacity(raw.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = out.chars().last();
            let next = chars.get(i + 1).copied();
            if let (Some(p), Some(n)) = (prev, next) {
                if is_word(p) && is_word(n) {
                    out.push(' ');
                }
            }
            continue;
        }
        out.push(c);
        if c == ',' {
            out.push(' ');
        }
    }
    out.trim_end().to_owned()
}

// ============================================================================
// DOC COMMENTS
// ============================================================================

/// Gather `///` doc-comments into a single string, one line per attribute.
fn docs(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|a| match &a.meta {
            Meta::NameValue(nv) if a.path().is_ident("doc") => {
                if let Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) = &nv.value
                {
                    Some(s.value())
                } else {
                    None
                }
            }
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// ATTRIBUTE ARGUMENTS
// ============================================================================

#[derive(Default)]
struct ToolArgs {
    description: Option<LitStr>,
    required: Vec<LitStr>,
    params: Vec<(LitStr, LitStr)>,
}

impl ToolArgs {
    fn annotations(&self) -> ToolAnnotations {
        let mut annotations =
            ToolAnnotations::new().required(self.required.iter().map(LitStr::value));
        if let Some(description) = &self.description {
            annotations = annotations.description(description.value());
        }
        for (name, description) in &self.params {
            annotations = annotations.param(name.value(), description.value());
        }
        annotations
    }

    fn push_param(&mut self, nv: &MetaNameValue) -> syn::Result<()> {
        let name = nv
            .path
            .get_ident()
            .ok_or_else(|| syn::Error::new(nv.path.span(), "expected a parameter name"))?;
        let name = LitStr::new(&name.unraw().to_string(), name.span());
        if self.params.iter().any(|(n, _)| n.value() == name.value()) {
            return Err(syn::Error::new(
                name.span(),
                format!("parameter '{}' is described more than once", name.value()),
            ));
        }
        self.params.push((name, string_literal(&nv.value)?));
        Ok(())
    }
}

fn string_literal(expr: &Expr) -> syn::Result<LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.clone()),
        other => Err(syn::Error::new(other.span(), "expected a string literal")),
    }
}

/// Parse `description = "..", required = [".."], <param> = "..", params(<param> = "..")`.
fn parse_args(attr: proc_macro2::TokenStream) -> syn::Result<ToolArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(attr)?;
    let mut args = ToolArgs::default();
    let mut seen_required = false;

    for meta in metas {
        match meta {
            Meta::NameValue(nv) if nv.path.is_ident("description") => {
                if args.description.is_some() {
                    return Err(syn::Error::new(nv.span(), "duplicate `description`"));
                }
                args.description = Some(string_literal(&nv.value)?);
            }
            Meta::NameValue(nv) if nv.path.is_ident("required") => {
                if seen_required {
                    return Err(syn::Error::new(nv.span(), "duplicate `required`"));
                }
                seen_required = true;
                let Expr::Array(ExprArray { elems, .. }) = &nv.value else {
                    return Err(syn::Error::new(
                        nv.value.span(),
                        "expected an array of parameter names, e.g. `required = [\"a\"]`",
                    ));
                };
                args.required = elems.iter().map(string_literal).collect::<syn::Result<_>>()?;
            }
            Meta::NameValue(nv) => args.push_param(&nv)?,
            Meta::List(list) if list.path.is_ident("params") => {
                let entries = list.parse_args_with(
                    Punctuated::<MetaNameValue, Token![,]>::parse_terminated,
                )?;
                for nv in &entries {
                    args.push_param(nv)?;
                }
            }
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "unsupported `#[tool]` argument; expected `description = \"..\"`, \
                     `required = [..]` or `<parameter> = \"..\"`",
                ));
            }
        }
    }
    Ok(args)
}

// ============================================================================
// SIGNATURE
// ============================================================================

struct Param {
    name: String,
    type_name: String,
    has_default: bool,
}

fn params(func: &ItemFn) -> Vec<Param> {
    func.sig
        .inputs
        .iter()
        .map(|arg| match arg {
            FnArg::Typed(PatType { pat, ty, .. }) => {
                let Pat::Ident(PatIdent { ident, .. }) = &**pat else {
                    abort!(pat, "`#[tool]` supports only identifier patterns");
                };
                let ty: &Type = ty;
                let inner = option_inner(ty);
                Param {
                    name: ident.unraw().to_string(),
                    type_name: type_name(inner.unwrap_or(ty)),
                    has_default: inner.is_some(),
                }
            }
            FnArg::Receiver(_) => abort!(arg, "`#[tool]` may not be used on `self` methods"),
        })
        .collect()
}

fn signature(name: &str, params: &[Param]) -> FunctionSignature {
    params.iter().fold(FunctionSignature::new(name), |sig, p| {
        let parameter = Parameter::new(&p.name, &p.type_name);
        sig.param(if p.has_default {
            parameter.with_default()
        } else {
            parameter
        })
    })
}

fn wrapper_name(fn_name: &str) -> String {
    let camel: String = fn_name
        .split('_')
        .map(|s| {
            let mut c = s.chars();
            match c.next() {
                None => String::new(),
                Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            }
        })
        .collect();
    format!("{camel}Tool")
}

// ============================================================================
// TOOL ATTRIBUTE MACRO
// ============================================================================

/// Describe a function as an LLM tool.
///
/// Emits `<CamelCaseName>Tool`, implementing `Reflect`, and registers the
/// function for `collect_tools()`. `Option<T>` parameters count as having a
/// default value. Names in `required` and description keys are checked
/// against the parameters at compile time.
#[proc_macro_error]
#[proc_macro_attribute]
pub fn tool(attr: TokenStream, item: TokenStream) -> TokenStream {
    // ───────── Parse the user function and arguments ─────────
    let func: ItemFn = parse_macro_input!(item);
    let args = match parse_args(attr.into()) {
        Ok(args) => args,
        Err(err) => abort!(err.span(), "{}", err),
    };

    let fn_name = func.sig.ident.unraw().to_string();
    let vis = &func.vis;
    let doc_lit = LitStr::new(&docs(&func.attrs), Span::call_site());
    let params = params(&func);

    // ───────── Same check as the runtime annotator ─────────
    if let Err(err) = validate(&signature(&fn_name, &params), &args.annotations()) {
        let span = args
            .required
            .iter()
            .chain(args.params.iter().map(|(name, _)| name))
            .find(|lit| lit.value() == err.parameter())
            .map_or_else(Span::call_site, LitStr::span);
        abort!(span, "{}", err);
    }

    // ───────── Generated tokens ─────────
    let crate_path = get_crate_path();
    let wrapper_ident = Ident::new(&wrapper_name(&fn_name), Span::call_site());
    let wrapper_doc = format!("Tool metadata for [`{fn_name}`].");

    let param_exprs = params.iter().map(|p| {
        let (name, ty) = (&p.name, &p.type_name);
        if p.has_default {
            quote! { #crate_path::Parameter::new(#name, #ty).with_default() }
        } else {
            quote! { #crate_path::Parameter::new(#name, #ty) }
        }
    });

    let description_call = args
        .description
        .as_ref()
        .map(|d| quote! { .description(#d) });
    let required_call = (!args.required.is_empty()).then(|| {
        let required = &args.required;
        quote! { .required([#(#required),*]) }
    });
    let param_calls = args.params.iter().map(|(name, description)| {
        quote! { .param(#name, #description) }
    });

    // ───────── Macro expansion ─────────
    TokenStream::from(quote! {
        #func

        #[doc = #wrapper_doc]
        #[derive(Debug, Clone, Copy, Default)]
        #vis struct #wrapper_ident;

        impl #crate_path::Reflect for #wrapper_ident {
            fn tool_function() -> #crate_path::ToolFunction {
                let signature = #crate_path::FunctionSignature::new(#fn_name)
                    .doc(#doc_lit)
                    #( .param(#param_exprs) )*;
                let annotations = #crate_path::ToolAnnotations::new()
                    #description_call
                    #required_call
                    #( #param_calls )*;
                #crate_path::ToolFunction::__from_validated(signature, annotations)
            }
        }

        #crate_path::inventory::submit! {
            #crate_path::ToolRegistration::new(
                #fn_name,
                <#wrapper_ident as #crate_path::Reflect>::tool_function,
            )
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_option_detection() {
        let simple: Type = parse_quote!(Option<i32>);
        assert_eq!(type_name(option_inner(&simple).unwrap()), "i32");

        let std_option: Type = parse_quote!(std::option::Option<String>);
        assert_eq!(type_name(option_inner(&std_option).unwrap()), "String");

        let core_option: Type = parse_quote!(core::option::Option<Vec<bool>>);
        assert_eq!(type_name(option_inner(&core_option).unwrap()), "Vec<bool>");

        let vec_type: Type = parse_quote!(Vec<i32>);
        assert!(option_inner(&vec_type).is_none());

        let fake_option: Type = parse_quote!(my_mod::Option<i32>);
        assert!(option_inner(&fake_option).is_none());

        let custom: Type = parse_quote!(MyCustomOption<i32>);
        assert!(option_inner(&custom).is_none());
    }

    #[test]
    fn test_type_names() {
        let cases: [(Type, &str); 7] = [
            (parse_quote!(i64), "i64"),
            (parse_quote!(Vec<String>), "Vec<String>"),
            (parse_quote!(&str), "&str"),
            (parse_quote!(&'static str), "&'static str"),
            (parse_quote!(HashMap<String, i32>), "HashMap<String, i32>"),
            (parse_quote!(std::path::PathBuf), "std::path::PathBuf"),
            (parse_quote!((i32, f64)), "(i32, f64)"),
        ];
        for (ty, expected) in cases {
            assert_eq!(type_name(&ty), expected);
        }
    }

    #[test]
    fn test_docs_keep_raw_lines() {
        let func: ItemFn = parse_quote! {
            /// Summary line.
            ///
            /// Details.
            fn f() {}
        };
        assert_eq!(docs(&func.attrs), " Summary line.\n\n Details.");
    }

    #[test]
    fn test_parse_args() {
        let args = parse_args(quote! {
            description = "X",
            required = ["b"],
            a = "first",
            params(r#type = "kind")
        })
        .unwrap();
        assert_eq!(args.description.unwrap().value(), "X");
        assert_eq!(args.required.len(), 1);
        let names: Vec<_> = args.params.iter().map(|(n, _)| n.value()).collect();
        assert_eq!(names, ["a", "type"]);
    }

    #[test]
    fn test_parse_args_rejects_bad_forms() {
        assert!(parse_args(quote! { required = "a" }).is_err());
        assert!(parse_args(quote! { a = 1 }).is_err());
        assert!(parse_args(quote! { a = "x", a = "y" }).is_err());
        assert!(parse_args(quote! { strict }).is_err());
        assert!(parse_args(quote! {}).unwrap().params.is_empty());
    }

    #[test]
    fn test_validation_against_signature() {
        let func: ItemFn = parse_quote! {
            fn f(a: i32, b: Option<i32>) {}
        };
        let sig = signature("f", &params(&func));
        assert!(sig.parameter("b").unwrap().has_default);

        let ok = parse_args(quote! { required = ["b"], a = "first" }).unwrap();
        assert!(validate(&sig, &ok.annotations()).is_ok());

        let bad = parse_args(quote! { required = ["nonexistent"] }).unwrap();
        let err = validate(&sig, &bad.annotations()).unwrap_err();
        assert_eq!(err.parameter(), "nonexistent");
    }

    #[test]
    fn test_wrapper_name() {
        assert_eq!(wrapper_name("example_function"), "ExampleFunctionTool");
        assert_eq!(wrapper_name("add"), "AddTool");
    }
}
