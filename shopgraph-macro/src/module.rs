use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, Attribute, Ident, ItemStruct, Path,
    Token, Type,
};

struct ModuleItem {
    attrs: Vec<Attribute>,
    path: Path,
}

impl Parse for ModuleItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let path = input.parse()?;
        Ok(ModuleItem { attrs, path })
    }
}

/// `(dyn Trait => Impl)`
struct BindingItem {
    trait_type: Type,
    impl_type: Path,
}

impl Parse for BindingItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let content;
        syn::parenthesized!(content in input);

        let trait_type: Type = content.parse()?;
        content.parse::<Token![=>]>()?;
        let impl_type: Path = content.parse()?;

        Ok(BindingItem {
            trait_type,
            impl_type,
        })
    }
}

#[derive(Default)]
struct ModuleArgs {
    imports: Vec<ModuleItem>,
    providers: Vec<ModuleItem>,
    bindings: Vec<BindingItem>,
}

impl Parse for ModuleArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = ModuleArgs::default();

        while !input.is_empty() {
            let name: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            let content;
            syn::bracketed!(content in input);

            match name.to_string().as_str() {
                "imports" => {
                    let items = content.parse_terminated(ModuleItem::parse, Token![,])?;
                    args.imports = items.into_iter().collect();
                }
                "providers" => {
                    let items = content.parse_terminated(ModuleItem::parse, Token![,])?;
                    args.providers = items.into_iter().collect();
                }
                "bindings" => {
                    let items = content.parse_terminated(BindingItem::parse, Token![,])?;
                    args.bindings = items.into_iter().collect();
                }
                other => {
                    return Err(syn::Error::new(
                        name.span(),
                        format!(
                            "unknown module key `{other}`, expected `imports`, `providers` or `bindings`"
                        ),
                    ))
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(args)
    }
}

pub fn module_attribute(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ModuleArgs);
    let input = parse_macro_input!(item as ItemStruct);
    generate_module_impl(&args, &input).into()
}

fn generate_module_impl(args: &ModuleArgs, input: &ItemStruct) -> TokenStream2 {
    let module_name = &input.ident;

    let import_registrations = args.imports.iter().map(|item| {
        let path = &item.path;
        let attrs = &item.attrs;
        quote! {
            #(#attrs)*
            <#path as ::shopgraph::Module>::register(container)?;
        }
    });

    let binding_registrations = args.bindings.iter().map(|binding| {
        let trait_type = &binding.trait_type;
        let impl_type = &binding.impl_type;
        quote! {
            container.register_trait::<#trait_type, #impl_type, _>(|i| {
                i as ::std::sync::Arc<#trait_type>
            });
        }
    });

    let provider_registrations = args.providers.iter().map(|item| {
        let path = &item.path;
        let attrs = &item.attrs;
        quote! {
            #(#attrs)*
            {
                let instance = <#path as ::shopgraph::Injectable>::inject(container)?;
                container.register(instance);
                ::shopgraph::tracing::debug!(provider = stringify!(#path), "registered provider");
            }
        }
    });

    quote! {
        #input

        impl ::shopgraph::Module for #module_name {
            fn register(
                container: &mut ::shopgraph::Container
            ) -> ::shopgraph::Result<()> {
                #(#binding_registrations)*
                #(#import_registrations)*
                #(#provider_registrations)*
                Ok(())
            }
        }

        impl #module_name {
            /// Create a new container with this module registered
            pub fn create_container() -> ::shopgraph::Result<::shopgraph::Container> {
                let mut container = ::shopgraph::Container::new();
                <Self as ::shopgraph::Module>::register(&mut container)?;
                Ok(container)
            }
        }
    }
}
