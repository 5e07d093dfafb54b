use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields, GenericArgument,
    PathArguments, Type,
};

pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_injectable_impl(&input) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_injectable_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new(
                    input.span(),
                    "#[derive(Injectable)] only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new(
                input.span(),
                "#[derive(Injectable)] can only be applied to structs",
            ))
        }
    };

    let mut field_injections = Vec::with_capacity(fields.len());
    for field in fields {
        let field_name = &field.ident;
        let inner = arc_inner_type(&field.ty).ok_or_else(|| {
            syn::Error::new(
                field.ty.span(),
                "injectable fields must be `Arc<T>` or `Arc<dyn Trait>`",
            )
        })?;

        let resolve_method = match inner {
            Type::TraitObject(_) => quote!(resolve_trait),
            _ => quote!(resolve),
        };

        field_injections.push(quote! {
            #field_name: container.#resolve_method::<#inner>()?
        });
    }

    let body = if field_injections.is_empty() {
        quote!(Self {})
    } else {
        quote!(Self { #(#field_injections),* })
    };

    Ok(quote! {
        impl #impl_generics ::shopgraph::Injectable for #struct_name #ty_generics #where_clause {
            fn inject(
                container: &::shopgraph::Container
            ) -> ::shopgraph::Result<Self> {
                Ok(#body)
            }
        }
    })
}

/// Inner type of `Arc<T>`, or `None` when the field is not an `Arc`.
fn arc_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Arc" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
